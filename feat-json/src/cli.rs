use {
    clap::{Parser, Subcommand},
    num_bigint::BigUint,
};

#[derive(Parser)]
#[command(name = "feat-json")]
#[command(author, version, about = "Count and enumerate JSON values by size")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Largest size searched by `ix` and `witness`
    #[arg(long, global = true, env = "FEAT_MAX_SIZE", default_value_t = 10_000)]
    pub max_size: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every value of one size, in index order
    All {
        /// Size of the values
        size: usize,
    },

    /// Print the number of values of one size
    Card {
        /// Size of the values
        size: usize,
    },

    /// Print the value at an index within one size
    Index {
        /// Size of the value
        size: usize,

        /// Index within that size (e.g. 42 or 10^30)
        #[arg(value_parser = feat_json::parse_index)]
        index: BigUint,
    },

    /// Print the value at an index into every value of every size
    Ix {
        /// Index across all sizes (e.g. 42 or 10^30)
        #[arg(value_parser = feat_json::parse_index)]
        index: BigUint,
    },

    /// Print the smallest value nested at least this deep
    Witness {
        /// Minimum nesting depth of arrays and objects
        depth: usize,
    },
}
