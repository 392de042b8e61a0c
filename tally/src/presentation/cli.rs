use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tally_core::Preset;

#[derive(Parser)]
#[command(author, version, about = "Sushiro plate counter & bill memo", long_about = None)]
pub struct Cli {
    /// Directory holding the persisted order
    #[arg(long, global = true, env = "SUSHI_TALLY_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// JSON config file (labels, storage key, service charge, catalog)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Built-in variant used when no config file is given
    #[arg(long, global = true, value_enum, default_value_t = PresetArg::Hk)]
    pub preset: PresetArg,

    /// Keep the order in memory only (nothing is written to disk)
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    Hk,
    En,
}

impl From<PresetArg> for Preset {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Hk => Preset::Hk,
            PresetArg::En => Preset::En,
        }
    }
}

#[derive(Args, Clone, Copy, Debug, Default)]
pub struct ServiceChargeArgs {
    /// Leave out the service charge
    #[arg(long, conflicts_with = "service_charge")]
    pub no_service_charge: bool,

    /// Force the service charge on even if the config disables it
    #[arg(long)]
    pub service_charge: bool,
}

impl ServiceChargeArgs {
    pub fn resolve(self, enabled_by_default: bool) -> bool {
        if self.no_service_charge {
            false
        } else if self.service_charge {
            true
        } else {
            enabled_by_default
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List plates and side items with current counts
    Menu,

    /// Add plates/items to the order
    Add {
        item: String,
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: u32,
    },

    /// Take plates/items off the order (never below zero)
    Remove {
        item: String,
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: u32,
    },

    /// Apply a signed change to one counter
    Adjust {
        item: String,
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },

    /// Print the running total and per-line breakdown
    Show {
        #[command(flatten)]
        service: ServiceChargeArgs,
    },

    /// Render the bill memo and copy it to stdout or a file
    Receipt {
        #[command(flatten)]
        service: ServiceChargeArgs,

        /// Write the memo here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Clear every counter (asks first unless --yes)
    Reset {
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
