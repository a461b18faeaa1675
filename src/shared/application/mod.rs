pub mod pagination;
pub mod use_case;
