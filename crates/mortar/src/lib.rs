pub mod db;
pub use db::Db;

pub mod ensure;
pub use ensure::{Comparison, Ensured};

pub mod driver {
    pub use mortar_core::driver::*;

    #[cfg(feature = "mysql")]
    pub use mortar_driver_mysql::{MySQL, PoolConfig};
}

pub use mortar_core::{async_trait, schema, stmt, Error, Result};
