use serde::{Deserialize, Serialize};

use crate::core::wire::flag;

/// Trading and classification flags the provider attaches to a security.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct SecurityFlags {
    /// Eligible for futures & options trading.
    #[serde(rename = "isFNOSec", default, deserialize_with = "flag")]
    pub is_fno_sec: bool,
    /// Has a pending corporate action.
    #[serde(rename = "isCASec", default, deserialize_with = "flag")]
    pub is_ca_sec: bool,
    /// Eligible for securities lending & borrowing.
    #[serde(rename = "isSLBSec", default, deserialize_with = "flag")]
    pub is_slb_sec: bool,
    /// A debt security.
    #[serde(rename = "isDebtSec", default, deserialize_with = "flag")]
    pub is_debt_sec: bool,
    /// Trading is suspended.
    #[serde(rename = "isSuspended", default, deserialize_with = "flag")]
    pub is_suspended: bool,
    /// An exchange traded fund.
    #[serde(rename = "isETFSec", default, deserialize_with = "flag")]
    pub is_etf_sec: bool,
    /// Delisted.
    #[serde(rename = "isDelisted", default, deserialize_with = "flag")]
    pub is_delisted: bool,
    /// A municipal bond.
    #[serde(rename = "isMunicipalBond", default, deserialize_with = "flag")]
    pub is_municipal_bond: bool,
    /// A hybrid symbol.
    #[serde(rename = "isHybridSymbol", default, deserialize_with = "flag")]
    pub is_hybrid_symbol: bool,
}
