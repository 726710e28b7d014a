// src/config.rs
use derive_builder::Builder;
use numeric_range_shared_kernel::PresentationError;

use crate::{
    cli::Args,
    input::InputSource,
    options::{Bound, NumberKind, OutputFormat},
};

/// Resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    #[builder(default = "vec![InputSource::Stdin]")]
    pub inputs: Vec<InputSource>,
    #[builder(default)]
    pub kind: NumberKind,
    #[builder(default)]
    pub bound: Bound,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub per_file: bool,
    #[builder(default)]
    pub lenient: bool,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(inputs) = &self.inputs {
            if inputs.is_empty() {
                return Err("at least one input is required".to_string());
            }
            if inputs.iter().filter(|source| **source == InputSource::Stdin).count() > 1 {
                return Err("stdin ('-') can only be read once".to_string());
            }
        }
        Ok(())
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mut builder = ConfigBuilder::default();
        if !args.paths.is_empty() {
            builder.inputs(args.paths.iter().map(|path| InputSource::from_path(path)).collect::<Vec<_>>());
        }

        builder
            .kind(NumberKind::from(args.kind))
            .bound(Bound::from(args.bound))
            .format(OutputFormat::from(args.format))
            .per_file(args.per_file)
            .lenient(args.lenient)
            .build()
            .map_err(|err| PresentationError::InvalidConfig(err.to_string()))
    }
}
