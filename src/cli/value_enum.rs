// src/cli/value_enum.rs
use clap::ValueEnum;

use crate::options::{Bound, NumberKind, OutputFormat};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliNumberKind {
    Int,
    Float,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliBound {
    Range,
    Min,
    Max,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Text,
    Json,
    Yaml,
    Csv,
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(CliNumberKind, NumberKind, Int, Float);
map_enum!(CliBound, Bound, Range, Min, Max);
map_enum!(CliOutputFormat, OutputFormat, Text, Json, Yaml, Csv);
