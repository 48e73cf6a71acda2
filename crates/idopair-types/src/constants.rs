//! System-wide constants for the idopair escrow.
//!
//! The price and the storage key layout are deployment-time facts: changing
//! either after deployment would silently re-interpret persisted state, so
//! they are compiled in and never configurable.

/// Fixed sale price: payment-asset units per sale-token unit.
/// Disbursement is `amount / PRICE` with integer floor division.
pub const PRICE: u128 = 21;

/// Event name the authorizer contract emits for a qualifying swap.
pub const SWAP_EVENT: &str = "SwapAsset";

/// Storage key of the administrator identity.
pub const KEY_ADMIN: [u8; 2] = [0x01, 0x01];

/// Storage key of the trusted payment-asset hash.
pub const KEY_ASSET_HASH: [u8; 2] = [0x02, 0x01];

/// Storage key of the trusted sale-token hash.
pub const KEY_TOKEN_HASH: [u8; 2] = [0x02, 0x02];

/// Storage key of the trusted authorizer-contract hash.
pub const KEY_AUTHORIZER_HASH: [u8; 2] = [0x02, 0x03];

/// Default trusted payment-asset hash (fUSDT), big endian.
pub const DEFAULT_ASSET_HASH: [u8; 20] = [
    0x83, 0xc4, 0x42, 0xb5, 0xdc, 0x4e, 0xe0, 0xed, 0x0e, 0x52, 0x49, 0x35, 0x2f, 0xa7, 0xc7,
    0x5f, 0x65, 0xd6, 0xbf, 0xd6,
];

/// Default trusted sale-token hash, big endian.
pub const DEFAULT_TOKEN_HASH: [u8; 20] = [
    0xad, 0x97, 0xa4, 0x39, 0xb4, 0xa0, 0x35, 0x18, 0x4d, 0x1a, 0xb4, 0x6a, 0x07, 0xee, 0x75,
    0x68, 0x7f, 0x54, 0x12, 0x37,
];

/// Default trusted authorizer-contract hash, big endian.
pub const DEFAULT_AUTHORIZER_HASH: [u8; 20] = [
    0x44, 0xba, 0xf1, 0xfa, 0xc6, 0xdc, 0x46, 0x5d, 0x63, 0x18, 0xe8, 0x49, 0x11, 0xfd, 0x9b,
    0xf5, 0x36, 0xc5, 0xd6, 0xfd,
];

/// Identity the administrator is seeded to at deployment.
pub const ORIGIN_ADMIN: [u8; 20] = [
    0x7f, 0x9b, 0x54, 0xa1, 0x20, 0xcd, 0x7c, 0x76, 0x3d, 0x3d, 0x8d, 0xf0, 0x9c, 0x2e, 0x99,
    0xeb, 0x03, 0xdc, 0x6b, 0x5a,
];

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Component name.
pub const CONTRACT_NAME: &str = "idoPairContract";
