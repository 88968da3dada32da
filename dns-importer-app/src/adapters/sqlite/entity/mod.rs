//! `SeaORM` entities.

pub mod subdomain;
