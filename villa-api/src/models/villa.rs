use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use villa_data::Entity;

/// The persisted row. Timestamps are maintained by the repository and never
/// leave through a transfer shape.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Villa {
    pub id: i64,
    pub name: String,
    pub details: String,
    pub rate: f64,
    pub sqft: i64,
    pub occupancy: i64,
    pub image_url: String,
    pub amenity: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Villa {
    type Id = i64;

    fn table_name() -> &'static str {
        "villas"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "details",
            "rate",
            "sqft",
            "occupancy",
            "image_url",
            "amenity",
            "created_at",
            "updated_at",
        ]
    }

    fn id(&self) -> &i64 {
        &self.id
    }
}

/// Read shape returned by every GET and by create.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillaDto {
    pub id: i64,
    pub name: String,
    pub details: String,
    pub rate: f64,
    pub sqft: i64,
    pub occupancy: i64,
    pub image_url: String,
    pub amenity: String,
}

impl From<Villa> for VillaDto {
    fn from(villa: Villa) -> Self {
        Self {
            id: villa.id,
            name: villa.name,
            details: villa.details,
            rate: villa.rate,
            sqft: villa.sqft,
            occupancy: villa.occupancy,
            image_url: villa.image_url,
            amenity: villa.amenity,
        }
    }
}

/// Create shape; no id, the store assigns one.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVillaRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub details: String,
    pub rate: f64,
    pub sqft: i64,
    pub occupancy: i64,
    pub image_url: String,
    pub amenity: String,
}

impl CreateVillaRequest {
    /// Build a not-yet-persisted row. Identity and timestamps are
    /// overwritten on insert.
    pub fn into_villa(self) -> Villa {
        let now = Utc::now();
        Villa {
            id: 0,
            name: self.name,
            details: self.details,
            rate: self.rate,
            sqft: self.sqft,
            occupancy: self.occupancy,
            image_url: self.image_url,
            amenity: self.amenity,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full-update shape; the body must carry the id of the row it replaces.
///
/// Also serves as the target the PATCH document is merged onto before
/// re-validation.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVillaRequest {
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub details: String,
    pub rate: f64,
    pub sqft: i64,
    pub occupancy: i64,
    pub image_url: String,
    pub amenity: String,
}

impl UpdateVillaRequest {
    /// Build the replacement row for a verified id. The timestamps here are
    /// placeholders: updates never write `created_at`, and the repository
    /// stamps `updated_at` itself.
    pub fn into_villa(self, id: i64) -> Villa {
        let now = Utc::now();
        Villa {
            id,
            name: self.name,
            details: self.details,
            rate: self.rate,
            sqft: self.sqft,
            occupancy: self.occupancy,
            image_url: self.image_url,
            amenity: self.amenity,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<&Villa> for UpdateVillaRequest {
    fn from(villa: &Villa) -> Self {
        Self {
            id: Some(villa.id),
            name: villa.name.clone(),
            details: villa.details.clone(),
            rate: villa.rate,
            sqft: villa.sqft,
            occupancy: villa.occupancy,
            image_url: villa.image_url.clone(),
            amenity: villa.amenity.clone(),
        }
    }
}

/// Partial-update document: a set of named field replacements. Absent fields
/// keep their current value; the id is immutable and not patchable.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchVillaRequest {
    pub name: Option<String>,
    pub details: Option<String>,
    pub rate: Option<f64>,
    pub sqft: Option<i64>,
    pub occupancy: Option<i64>,
    pub image_url: Option<String>,
    pub amenity: Option<String>,
}

impl PatchVillaRequest {
    /// Apply the present fields onto a full-update document built from the
    /// current row. The caller re-validates the result before writing.
    pub fn apply_to(&self, doc: &mut UpdateVillaRequest) {
        if let Some(name) = &self.name {
            doc.name = name.clone();
        }
        if let Some(details) = &self.details {
            doc.details = details.clone();
        }
        if let Some(rate) = self.rate {
            doc.rate = rate;
        }
        if let Some(sqft) = self.sqft {
            doc.sqft = sqft;
        }
        if let Some(occupancy) = self.occupancy {
            doc.occupancy = occupancy;
        }
        if let Some(image_url) = &self.image_url {
            doc.image_url = image_url.clone();
        }
        if let Some(amenity) = &self.amenity {
            doc.amenity = amenity.clone();
        }
    }
}
