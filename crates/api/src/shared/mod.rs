pub mod auth;
pub mod cascade;
#[cfg(test)]
pub mod test_utils;
pub mod usecase;
