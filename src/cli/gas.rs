use clap::Args;
use serde::Deserialize;

pub const DEFAULT_GAS_CURRENCY: &str = "USD";
pub const HELP_GAS_CURRENCY: &str =
    "Optional. Fiat currency used by the gas usage report. [default: USD]";

/// Gas report options. Whether the report runs is driven by `REPORT_GAS`.
#[derive(Args, Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[command(next_help_heading = "Gas reporting")]
#[serde(default)]
pub struct GasReportOptions {
    #[arg(
        long = "gas_currency",
        alias = "gas-currency",
        global = true,
        value_name = "CURRENCY",
        help = HELP_GAS_CURRENCY
    )]
    pub currency: Option<String>,
}
