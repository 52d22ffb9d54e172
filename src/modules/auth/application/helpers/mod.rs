mod platform_access;

pub use platform_access::{AccessError, PlatformAccess};
