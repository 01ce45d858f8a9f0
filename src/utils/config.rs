//! Configuration and constants for the report.

/// Default metrics file, resolved against the working directory
pub const DEFAULT_METRICS_FILE: &str = "metrics_output.json";

/// Default fiat price of one unit of native currency (USD per ETH)
pub const DEFAULT_PRICE_USD: f64 = 2000.0;

// 1 ETH = 10^18 wei
pub const WEI_PER_ETH: f64 = 1e18;

/// Action name used by every deployment record
pub const DEPLOY_ACTION: &str = "deploy";

/// Width (in characters) text cells are wrapped to in table images
pub const DEFAULT_COL_WRAP: usize = 30;

// Chart geometry (matplotlib default figure: 8x6 inches at 100 dpi)
pub const DEFAULT_CHART_WIDTH: u32 = 800;
pub const DEFAULT_CHART_HEIGHT: u32 = 600;

// Table geometry, in inches and dots per inch
pub const TABLE_DPI: f64 = 200.0;
pub const TABLE_MIN_WIDTH_IN: f64 = 6.0;
pub const TABLE_COL_WIDTH_IN: f64 = 1.5;
pub const TABLE_MIN_HEIGHT_IN: f64 = 2.0;
pub const TABLE_ROW_HEIGHT_IN: f64 = 0.5;
pub const TABLE_TITLE_HEIGHT_IN: f64 = 0.3;

// Output file names
pub const GAS_PER_ACTION_PREFIX: &str = "gas_medio_";
pub const DEPLOY_PLUS_CALL_FILE: &str = "gas_deploy_plus_call.png";
pub const CUMULATIVE_COST_FILE: &str = "costo_gas_cumulativo.png";
pub const FEE_ETH_FILE: &str = "fee_media_eth.png";
pub const FEE_USD_FILE: &str = "fee_media_usd.png";
pub const BYTECODE_SIZE_FILE: &str = "dimensione_bytecode.png";
pub const GAS_SUMMARY_TABLE_FILE: &str = "tabella_riepilogo_utilizzo_gas.png";
pub const SAVINGS_TABLE_FILE: &str = "tabella_percentuale_risparmio_gas.png";
pub const FEE_SUMMARY_TABLE_FILE: &str = "tabella_riepilogo_fee.png";
