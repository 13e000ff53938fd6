//! Request handlers, one module per resource.

/// `/crops` routes
pub mod crops;
/// `/farms` routes
pub mod farms;
/// `/fertilizers` routes
pub mod fertilizers;
