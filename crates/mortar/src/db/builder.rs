use super::{Comparator, Db, Shared};
use crate::{ensure, Comparison};

use mortar_core::driver::Driver;
use mortar_sql::Serializer;

use std::sync::Arc;

pub struct Builder {
    debug: bool,
    compare: Comparator,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            debug: false,
            compare: Arc::new(ensure::compare_definitions),
        }
    }
}

impl Builder {
    /// In debug mode a table whose definition compares as
    /// [`Comparison::Different`] is dropped and created again.
    pub fn debug(&mut self, debug: bool) -> &mut Self {
        self.debug = debug;
        self
    }

    /// Replaces the definition comparator. It receives the existing
    /// definition first and the compiled statement second.
    pub fn compare_with(
        &mut self,
        compare: impl Fn(&str, &str) -> Comparison + Send + Sync + 'static,
    ) -> &mut Self {
        self.compare = Arc::new(compare);
        self
    }

    /// Wraps `driver`. The pool is not prepared until [`Db::init`].
    pub fn build(&mut self, driver: impl Driver) -> Db {
        Db {
            shared: Arc::new(Shared {
                driver: Box::new(driver),
                serializer: Serializer::mysql(),
                debug: self.debug,
                compare: self.compare.clone(),
            }),
        }
    }

    #[cfg(feature = "mysql")]
    pub fn mysql(&mut self, config: crate::driver::PoolConfig) -> Db {
        self.build(crate::driver::MySQL::new(config))
    }

    /// Builds a MySQL-backed handle from a connection URL and initializes it.
    #[cfg(feature = "mysql")]
    pub async fn connect(&mut self, url: &str) -> mortar_core::Result<Db> {
        let db = self.build(crate::driver::MySQL::from_url(url)?);
        db.init().await?;
        Ok(db)
    }
}
