use rigcheck::rigcheck_core::PcSpecs;
use structopt::StructOpt;

use crate::run_impl;

/// The four free-text component labels of a build. Blank ones are handled by
/// the engine's missing-component policy.
#[derive(StructOpt)]
pub struct Specs {
    #[structopt(long, default_value = "")]
    cpu: String,
    #[structopt(long, default_value = "")]
    gpu: String,
    #[structopt(long, default_value = "")]
    ram: String,
    #[structopt(long, default_value = "")]
    storage: String,
}

impl From<&Specs> for PcSpecs {
    fn from(specs: &Specs) -> Self {
        PcSpecs::new(&specs.cpu, &specs.gpu, &specs.ram, &specs.storage)
    }
}

#[derive(StructOpt)]
pub struct Analyze {
    #[structopt(flatten)]
    specs: Specs,
}

run_impl!(Analyze, self, ctx, ser, {
    erased_serde::serialize(&ctx.engine.analyze_build(&PcSpecs::from(&self.specs))?, ser)?;
});

#[derive(StructOpt)]
pub struct Pairing {
    cpu: String,
    gpu: String,
}

run_impl!(Pairing, self, ctx, ser, {
    erased_serde::serialize(&ctx.engine.analyze_pairing(&self.cpu, &self.gpu), ser)?;
});

#[derive(StructOpt)]
pub struct Profile {
    cpu: String,
    gpu: String,
    /// Free text, echoed back. Defaults to 1080p.
    #[structopt(long)]
    resolution: Option<String>,
}

run_impl!(Profile, self, ctx, ser, {
    erased_serde::serialize(
        &ctx
            .engine
            .gaming_profile(&self.cpu, &self.gpu, self.resolution.as_deref()),
        ser,
    )?;
});
