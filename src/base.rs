/// Integer handle for a vocabulary token. Signed so that arbitrary IDs typed
/// by a user (including negative ones) are representable; lookups on IDs the
/// vocabulary never minted resolve to the unknown token.
pub type TokenId = i32;
