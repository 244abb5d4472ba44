/// Shared constants for the e-commerce gateway and its backends
///
/// Values here are part of the public REST contract; changing them changes
/// what callers observe.

/// Version prefix every REST route is mounted under.
pub const API_PREFIX: &str = "/v1";

/// Offset applied when a list request omits `offset`.
pub const DEFAULT_OFFSET: i32 = 0;

/// Limit applied when a list request omits `limit`.
pub const DEFAULT_LIMIT: i32 = 10;

/// Search filter applied when a list request omits `search`.
pub const DEFAULT_SEARCH: &str = "";

/// Message carried by every success envelope.
pub const SUCCESS_MESSAGE: &str = "OK";

/// Error text for a credential the auth backend did not accept.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Error text for a valid credential whose role lacks the route's capability.
pub const PERMISSION_DENIED_MESSAGE: &str = "Permission Denied";

/// Protobuf package the backend services are declared in.
pub const RPC_PACKAGE: &str = "e_commerce";
