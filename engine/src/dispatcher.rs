//! Conversion dispatch over the four supported kinds.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::instrument;
use unitconv_common::{round_dp, ConversionRequest, ConversionResult, Currency};
use unitconv_fx::RateResolver;
use unitconv_units::{convert_length, convert_temperature, convert_weight};

use crate::error::ConvertResult;

/// The four conversion kinds exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionKind {
    Length,
    Weight,
    Temperature,
    Currency,
}

impl ConversionKind {
    /// Stable lower-case name, used as a metrics label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionKind::Length => "length",
            ConversionKind::Weight => "weight",
            ConversionKind::Temperature => "temperature",
            ConversionKind::Currency => "currency",
        }
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a dispatched conversion: the typed result plus the
/// elapsed wall time. The duration is opaque to the engine; the outer
/// layer feeds it to metrics and logging.
#[derive(Debug)]
pub struct Dispatched {
    pub kind: ConversionKind,
    pub result: ConvertResult<ConversionResult>,
    pub elapsed: Duration,
}

impl Dispatched {
    /// Whether the conversion produced a result.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Uniform conversion entry point.
///
/// Length, weight and temperature resolve purely from the unit tables;
/// currency delegates rate resolution to the injected resolver.
pub struct Dispatcher {
    resolver: Arc<RateResolver>,
}

impl Dispatcher {
    /// Create a dispatcher around a rate resolver.
    pub fn new(resolver: Arc<RateResolver>) -> Self {
        Self { resolver }
    }

    /// Convert `request.value` between units of the given kind.
    ///
    /// Unit normalization is per kind: lower-case names for
    /// length/weight/temperature, upper-case ISO codes for currency.
    /// Linear kinds round to 6 decimals, temperature and currency to 2.
    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn convert(&self, kind: ConversionKind, request: &ConversionRequest) -> Dispatched {
        let started = Instant::now();
        let result = self.dispatch(kind, request).await;
        Dispatched {
            kind,
            result,
            elapsed: started.elapsed(),
        }
    }

    async fn dispatch(
        &self,
        kind: ConversionKind,
        request: &ConversionRequest,
    ) -> ConvertResult<ConversionResult> {
        let converted = match kind {
            ConversionKind::Length => {
                convert_length(request.value, &request.from_unit, &request.to_unit)?
            }
            ConversionKind::Weight => {
                convert_weight(request.value, &request.from_unit, &request.to_unit)?
            }
            ConversionKind::Temperature => {
                convert_temperature(request.value, &request.from_unit, &request.to_unit)?
            }
            ConversionKind::Currency => {
                let from = Currency::new(request.from_unit.as_str());
                let to = Currency::new(request.to_unit.as_str());
                let rate = self.resolver.resolve(&from, &to).await?;
                round_dp(request.value * rate, 2)
            }
        };

        Ok(ConversionResult::new(
            request.value,
            converted,
            request.from_unit.as_str(),
            request.to_unit.as_str(),
        ))
    }
}
