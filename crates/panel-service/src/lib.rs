//! # panel-service
//!
//! Application layer containing business logic, outbound clients, and DTOs.

pub mod clients;
pub mod dto;
pub mod services;

#[cfg(test)]
mod testing;

pub use clients::{
    GameServerClient, GameServerError, HttpGameServerClient, HttpSteamClient, SteamClient,
    SteamClientError,
};
pub use dto::{
    AuthResponse, BanResponse, CharacterResponse, CreateWarningRequest,
    ExtendedCharacterResponse, HealthResponse, IssueBanRequest, LogListResponse, LogQuery,
    OnlinePlayersResponse, PageResponse, PanelLogQuery, PanelLogResponse, PlayerDetailResponse,
    PlayerResponse, ReadinessResponse, RefreshTokenRequest, SearchQuery, StaffResponse,
    StatusQuery, WarningResponse,
};
pub use services::{
    AuthService, BanService, CacheTtls, CharacterService, LogService, NameService,
    PanelLogService, PlayerService, ResolvedPlayer, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, StatusService, WarningService,
};
