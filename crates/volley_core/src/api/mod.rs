pub mod club_json;

pub use club_json::{
    execute_club_json, ClubRequest, ClubRequestType, ClubResponse, ClubResponseType,
    API_SCHEMA_VERSION,
};
