// src/models/reservation.rs

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

// ---
// 1. Recorrência
// ---
// Guardada tal como veio (JSONB). Nunca expandimos as ocorrências aqui.
// No JSON o descritor é plano: `type` escolhe o padrão e `endType` o fim.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrencePattern {
    /// 0 = domingo .. 6 = sábado
    Weekly { days_of_week: BTreeSet<u8> },
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceEnd {
    Never,
    After { occurrences: u32 },
    On { date: DateTime<Utc> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecurrenceJson", into = "RecurrenceJson")]
pub struct Recurrence {
    pub enabled: bool,
    pub pattern: RecurrencePattern,
    pub end: RecurrenceEnd,
}

impl Default for Recurrence {
    fn default() -> Self {
        Self {
            enabled: false,
            pattern: RecurrencePattern::Weekly { days_of_week: BTreeSet::new() },
            end: RecurrenceEnd::Never,
        }
    }
}

/// Forma do descritor no JSON e no banco. `type` e `endType` ausentes
/// (ou vazios) valem `weekly` e `never`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceJson {
    #[serde(default)]
    pub enabled: bool,

    #[serde(rename = "type", default)]
    #[schema(example = "weekly")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u8>>,

    #[serde(default)]
    #[schema(example = "never")]
    pub end_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_after: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl TryFrom<RecurrenceJson> for Recurrence {
    type Error = String;

    fn try_from(raw: RecurrenceJson) -> Result<Self, Self::Error> {
        let pattern = match raw.kind.as_deref().unwrap_or_default() {
            "" | "weekly" => RecurrencePattern::Weekly {
                days_of_week: raw.days_of_week.unwrap_or_default().into_iter().collect(),
            },
            "monthly" => RecurrencePattern::Monthly,
            "yearly" => RecurrencePattern::Yearly,
            other => return Err(format!("tipo de recorrência desconhecido: {other}")),
        };

        let end = match raw.end_type.as_deref().unwrap_or_default() {
            "" | "never" => RecurrenceEnd::Never,
            // `endAfter` ausente cai na validação (occurrences_min)
            "after" => RecurrenceEnd::After { occurrences: raw.end_after.unwrap_or(0) },
            "on" => RecurrenceEnd::On {
                date: raw.end_date.ok_or("endType \"on\" exige endDate")?,
            },
            other => return Err(format!("endType desconhecido: {other}")),
        };

        Ok(Self { enabled: raw.enabled, pattern, end })
    }
}

impl From<Recurrence> for RecurrenceJson {
    fn from(value: Recurrence) -> Self {
        let (kind, days_of_week) = match value.pattern {
            RecurrencePattern::Weekly { days_of_week } => {
                ("weekly", Some(days_of_week.into_iter().collect()))
            }
            RecurrencePattern::Monthly => ("monthly", None),
            RecurrencePattern::Yearly => ("yearly", None),
        };
        let (end_type, end_after, end_date) = match value.end {
            RecurrenceEnd::Never => ("never", None, None),
            RecurrenceEnd::After { occurrences } => ("after", Some(occurrences), None),
            RecurrenceEnd::On { date } => ("on", None, Some(date)),
        };

        Self {
            enabled: value.enabled,
            kind: Some(kind.to_string()),
            days_of_week,
            end_type: Some(end_type.to_string()),
            end_after,
            end_date,
        }
    }
}

// ---
// 2. Reserva
// ---
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub partner_id: Uuid,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_all_day: bool,
    pub is_multi_day: bool,
    pub capacity: i32,
    #[sqlx(json)]
    #[schema(value_type = RecurrenceJson)]
    pub recurrence: Recurrence,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Corpo aceito tanto no POST quanto no PUT
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayload {
    #[serde(default)]
    #[validate(length(min = 1, code = "name_required"))]
    #[schema(example = "Brunch de domingo")]
    pub name: String,

    #[validate(required(code = "start_date_required"))]
    pub start_date: Option<DateTime<Utc>>,

    /// Se ausente, assume `startDate`.
    pub end_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub is_all_day: bool,

    #[serde(default)]
    pub is_multi_day: bool,

    #[serde(default)]
    #[validate(range(min = 1, code = "capacity_min"))]
    #[schema(example = 20, minimum = 1)]
    pub capacity: i32,

    #[serde(default)]
    #[validate(custom(function = "crate::common::validation::recurrence"))]
    #[schema(value_type = RecurrenceJson)]
    pub recurrence: Recurrence,
}

/// Os campos de uma reserva já validados e normalizados
/// (o fim herda o início quando não informado).
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationFields {
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_all_day: bool,
    pub is_multi_day: bool,
    pub capacity: i32,
    pub recurrence: Recurrence,
}

impl TryFrom<ReservationPayload> for ReservationFields {
    type Error = ValidationErrors;

    fn try_from(payload: ReservationPayload) -> Result<Self, Self::Error> {
        payload.validate()?;

        let Some(start_date) = payload.start_date else {
            let mut errors = ValidationErrors::new();
            errors.add("start_date", ValidationError::new("start_date_required"));
            return Err(errors);
        };

        Ok(Self {
            name: payload.name,
            start_date,
            end_date: payload.end_date.unwrap_or(start_date),
            is_all_day: payload.is_all_day,
            is_multi_day: payload.is_multi_day,
            capacity: payload.capacity,
            recurrence: payload.recurrence,
        })
    }
}

// ---
// 3. Janela de datas para a listagem
// ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    // Início OU fim dentro da janela (limites inclusivos). Uma reserva que
    // cobre a janela inteira sem nenhum dos dois pontos dentro dela fica de fora.
    pub fn touches(&self, reservation: &Reservation) -> bool {
        self.contains(reservation.start_date) || self.contains(reservation.end_date)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
