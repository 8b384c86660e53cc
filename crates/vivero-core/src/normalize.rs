//! Row normalization for heterogeneous dataset sources.
//!
//! The directory dataset has lived through three storage generations, and
//! each left its own key vocabulary behind:
//!
//! | Generation      | Example keys                                         |
//! |-----------------|------------------------------------------------------|
//! | CSV export      | `Nombre`, `Región (CCAA)`, `Inversión total (€)`     |
//! | Database rows   | `nombre`, `region`, `inversion_total`                |
//! | Legacy app JSON | `name`, `location`, `totalFunding`                   |
//!
//! `normalize_row` accepts any mix of these shapes and produces one
//! canonical [`StartupRecord`]. Scalar values are coerced to strings the
//! way the dataset always stored them; rows without a usable name are
//! rejected rather than silently producing anonymous records.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{derive_slug, StartupRecord};

// Alias tables, first usable value wins. Database keys lead because they
// are the shape the live dataset actually ships in.
const ID_KEYS: &[&str] = &["id", "ID"];
const NAME_KEYS: &[&str] = &["nombre", "Nombre", "name"];
const DESCRIPTION_KEYS: &[&str] = &["descripcion", "Descripción", "description"];
const REGION_KEYS: &[&str] = &["region", "Región (CCAA)", "location"];
const YEAR_KEYS: &[&str] = &["year", "Año", "foundingYear"];
const VERTICAL_KEYS: &[&str] = &["vertical", "Vertical"];
const SUBVERTICAL_KEYS: &[&str] = &["subvertical", "Subvertical"];
const TECHNOLOGY_KEYS: &[&str] = &["tecnologia", "Tecnología", "technologyFocus"];
const IMPACT_KEYS: &[&str] = &["tipo_impacto", "Tipo de impacto", "impactType"];
const STAGE_KEYS: &[&str] = &["nivel_madurez", "Nivel de madurez", "fundingStage"];
const DIVERSITY_KEYS: &[&str] = &["diversidad_equipo", "Diversidad del equipo", "teamDiversity"];
const FUNDING_KEYS: &[&str] = &["inversion_total", "Inversión total (€)", "totalFunding"];
const WEBSITE_KEYS: &[&str] = &["website", "Web", "web"];

/// Normalize a single raw row into a [`StartupRecord`].
///
/// `index` is only used in error messages so callers can locate the
/// offending row in their source file.
pub fn normalize_row(row: &Value, index: usize) -> Result<StartupRecord> {
    let object = row
        .as_object()
        .ok_or_else(|| Error::InvalidInput(format!("row {index} is not an object")))?;

    let lookup = |keys: &[&str]| -> String {
        keys.iter()
            .find_map(|key| {
                object
                    .get(*key)
                    .and_then(coerce_scalar)
                    .filter(|value| !value.is_empty())
            })
            .unwrap_or_default()
    };

    let name = lookup(NAME_KEYS);
    if name.is_empty() {
        return Err(Error::InvalidInput(format!("row {index} has no name")));
    }

    let id = {
        let explicit = lookup(ID_KEYS);
        if explicit.is_empty() {
            derive_slug(&name)
        } else {
            explicit
        }
    };

    let website = {
        let raw = lookup(WEBSITE_KEYS);
        if raw.is_empty() {
            None
        } else {
            Some(raw)
        }
    };

    Ok(StartupRecord {
        id,
        name,
        description: lookup(DESCRIPTION_KEYS),
        region: lookup(REGION_KEYS),
        founding_year: lookup(YEAR_KEYS),
        vertical: lookup(VERTICAL_KEYS),
        subvertical: lookup(SUBVERTICAL_KEYS),
        technologies: lookup(TECHNOLOGY_KEYS),
        impact_types: lookup(IMPACT_KEYS),
        funding_stage: lookup(STAGE_KEYS),
        team_diversity: lookup(DIVERSITY_KEYS),
        total_funding: lookup(FUNDING_KEYS),
        website,
    })
}

/// Normalize a batch of raw rows, skipping the unusable ones.
///
/// Bad rows are logged at `warn` with their index and dropped; one
/// malformed entry never poisons the rest of the import.
pub fn normalize_rows(rows: &[Value]) -> Vec<StartupRecord> {
    let records: Vec<StartupRecord> = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| match normalize_row(row, index) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!(row_index = index, error = %error, "Skipping unusable row");
                None
            }
        })
        .collect();

    debug!(
        input_count = rows.len(),
        result_count = records.len(),
        "Row normalization complete"
    );

    records
}

/// Coerce a JSON scalar to the string form the dataset stores.
///
/// Numbers keep their JSON rendering (`2019`, `1.5`), strings are
/// trimmed. Arrays, objects, and nulls have no scalar form.
fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
