//! Transport decision endpoint

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ServiceState;
use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::config::TransportConfig;
use crate::decision::{DecisionEngine, OptionSummary, overall_assessment};
use crate::geo::{Coordinates, haversine_km};
use crate::provider::{AvailabilityProvider, FixedAvailability};
use crate::types::{
    AvailabilitySnapshot, DecisionError, DecisionTrace, GroundLegs, ModeInputs, ShipmentRequest,
    TransportMode,
};

/// Caller-supplied inputs for one mode. Omitted legs use the configured default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModeRequest {
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    #[serde(default)]
    pub to_origin_airport_hours: Option<f64>,
    #[serde(default)]
    pub from_destination_airport_hours: Option<f64>,
    /// Commercial only: departure fits the operating window
    #[serde(default)]
    pub schedule_compatible: Option<bool>,
}

impl ModeRequest {
    fn inputs(&self, available_by_default: bool, default_leg: f64) -> ModeInputs {
        ModeInputs {
            available: self.available.unwrap_or(available_by_default),
            estimated_cost: self.estimated_cost,
            ground_legs: GroundLegs::new(
                self.to_origin_airport_hours.unwrap_or(default_leg),
                self.from_destination_airport_hours.unwrap_or(default_leg),
            ),
        }
    }
}

/// Request body for `POST /api/v1/decide`.
///
/// Either `distance_km` or both `origin` and `destination` must be given.
/// Ground defaults to available, the air modes to unavailable.
#[derive(Debug, Clone, Deserialize)]
pub struct DecideRequest {
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub origin: Option<Coordinates>,
    #[serde(default)]
    pub destination: Option<Coordinates>,
    pub max_ischemia_hours: f64,
    pub urgency_tier: i64,
    #[serde(default)]
    pub ground: ModeRequest,
    #[serde(default)]
    pub commercial_air: ModeRequest,
    #[serde(default)]
    pub dedicated_air: ModeRequest,
}

impl DecideRequest {
    fn distance(&self) -> Result<f64, String> {
        if let Some(km) = self.distance_km {
            return Ok(km);
        }
        match (self.origin, self.destination) {
            (Some(from), Some(to)) => {
                let from = from.validate().map_err(|e| format!("origin: {e}"))?;
                let to = to.validate().map_err(|e| format!("destination: {e}"))?;
                Ok(haversine_km(from, to))
            }
            _ => Err("distance_km or both origin and destination are required".to_string()),
        }
    }

    fn shipment(&self) -> Result<ShipmentRequest, String> {
        let urgency_tier = u8::try_from(self.urgency_tier).map_err(|_| {
            DecisionError::InvalidInput {
                field: "urgency_tier",
                reason: format!("must be in 1..=5 (got {})", self.urgency_tier),
            }
            .to_string()
        })?;
        ShipmentRequest::new(self.distance()?, self.max_ischemia_hours, urgency_tier)
            .map_err(|e| e.to_string())
    }

    fn snapshot(&self, config: &TransportConfig) -> AvailabilitySnapshot {
        let leg = config.server.default_ground_leg_hours;
        let commercial = self.commercial_air.inputs(false, leg);
        let schedule_ok = self.commercial_air.schedule_compatible.unwrap_or(true);
        AvailabilitySnapshot {
            ground: self.ground.inputs(true, 0.0),
            commercial_air: ModeInputs {
                available: commercial.available && schedule_ok,
                ..commercial
            },
            dedicated_air: self.dedicated_air.inputs(false, leg),
            commercial_offered: commercial.available,
            commercial_schedule_ok: commercial.available && schedule_ok,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DecideResponse {
    pub distance_km: f64,
    pub selected_mode: TransportMode,
    /// Training label code of the selected mode
    pub label: u8,
    pub assessment: String,
    pub trace: DecisionTrace,
    pub options: Vec<OptionSummary>,
}

/// POST /api/v1/decide - Select a transport mode for one shipment
pub async fn decide(
    State(state): State<ServiceState>,
    body: Result<Json<DecideRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return ApiErrorResponse::invalid_input(rejection.body_text()),
    };

    let config = state.current();
    let request = match body.shipment() {
        Ok(r) => r,
        Err(msg) => return ApiErrorResponse::invalid_input(msg),
    };
    let mut provider = FixedAvailability::new(body.snapshot(&config));
    let snapshot = provider.snapshot(&request);

    let engine = DecisionEngine::new(&config);
    let (decision, options) = match engine
        .evaluate(&request, &snapshot)
        .and_then(|d| Ok((d, engine.options(&request, &snapshot)?)))
    {
        Ok(pair) => pair,
        Err(e) => return ApiErrorResponse::invalid_input(e.to_string()),
    };

    info!(
        distance_km = request.distance_km(),
        urgency = request.urgency_tier(),
        mode = %decision.mode,
        branch = %decision.branch(),
        provider = provider.provider_name(),
        "Decision served"
    );

    ApiResponse::ok(DecideResponse {
        distance_km: request.distance_km(),
        selected_mode: decision.mode,
        label: decision.mode.code(),
        assessment: overall_assessment(&decision, &options),
        trace: decision.trace,
        options,
    })
}
