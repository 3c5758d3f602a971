use anyhow::Context as _;
use async_trait::async_trait;
use erased_serde::Serializer;
use rigcheck::{common::Client, rigcheck_core::Engine};

/// Everything a subcommand may need, built once in `main`.
pub struct Context {
    pub engine: Engine,
    pub client: Client<false>,
    pub rawg_key: Option<String>,
}

impl Context {
    pub fn rawg_key(&self) -> anyhow::Result<&str> {
        self.rawg_key
            .as_deref()
            .context("a RAWG API key is required, set RAWG_API_KEY or pass --rawg-key")
    }
}

#[async_trait]
pub trait Run {
    async fn run(
        &self,
        ctx: &Context,
        serializer: &mut (dyn Serializer + Send),
    ) -> anyhow::Result<()>;
}

#[macro_export]
macro_rules! run_impl {
    ($i:ident, $self:ident, $ctx:ident, $ser:ident, $b:block) => {
        #[async_trait::async_trait]
        impl $crate::common::Run for $i {
            async fn run(
                &$self,
                $ctx: &$crate::common::Context,
                $ser: &mut (dyn erased_serde::Serializer + Send),
            ) -> anyhow::Result<()> {
                $b;

                Ok(())
            }
        }
    }
}

#[macro_export]
macro_rules! run_impl_struct {
    ($i:ident, $b:ident) => {
        #[async_trait::async_trait]
        impl $crate::common::Run for $i {
            async fn run(
                &self,
                ctx: &$crate::common::Context,
                serializer: &mut (dyn erased_serde::Serializer + Send),
            ) -> anyhow::Result<()> {
                $crate::common::Run::run(&self.$b, ctx, serializer).await
            }
        }
    };
}
