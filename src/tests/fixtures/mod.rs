// Shared builders for cart tests. Compiled only under cfg(test).

pub mod products;
pub mod store;
