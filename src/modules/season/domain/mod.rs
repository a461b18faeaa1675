pub mod entities;
pub mod repositories;
pub mod services;
pub mod summary;

#[cfg(test)]
pub mod test_support;
