//! Data transfer objects for API requests and responses

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateWarningRequest, IssueBanRequest, LogQuery, PanelLogQuery, RefreshTokenRequest,
    SearchQuery, StatusQuery,
};

pub use responses::{
    AuthResponse, BanResponse, CharacterResponse, ExtendedCharacterResponse,
    HealthChecks, HealthResponse, IdentifierResponse, LogListResponse, LogResponse,
    OnlinePlayersResponse, PageLinks, PageResponse, PanelLogResponse, PlayerDetailResponse,
    PlayerProfileResponse, PlayerResponse, ReadinessResponse, StaffResponse, VehicleResponse,
    WarningResponse,
};
