use serde::Serialize;
use std::fmt;

use super::custom_fields::{CustomFieldInterface, CustomFields};
use super::errors::ClauseError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// Sort clauses understood by the content filtering layer.
///
/// Variants without extra parameters only carry their direction. `Field` and
/// `MapLocationDistance` carry a target and an override map, and can only be
/// built through their validating constructors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SortClause {
    ContentId(SortDirection),
    ContentName(SortDirection),
    DatePublished(SortDirection),
    DateModified(SortDirection),
    SectionIdentifier(SortDirection),
    SectionName(SortDirection),
    LocationId(SortDirection),
    LocationDepth(SortDirection),
    LocationPriority(SortDirection),
    LocationPath(SortDirection),
    Field(FieldSort),
    MapLocationDistance(MapLocationDistance),
}

/// Extra parameters some sort variants need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortTarget<'a> {
    Field(&'a FieldTarget),
    MapLocation(&'a MapLocationTarget),
}

impl SortClause {
    /// Logical sort key, fixed per variant.
    pub fn field_or_column_name(&self) -> &'static str {
        match self {
            SortClause::ContentId(_) => "content_id",
            SortClause::ContentName(_) => "content_name",
            SortClause::DatePublished(_) => "date_published",
            SortClause::DateModified(_) => "date_modified",
            SortClause::SectionIdentifier(_) => "section_identifier",
            SortClause::SectionName(_) => "section_name",
            SortClause::LocationId(_) => "location_id",
            SortClause::LocationDepth(_) => "location_depth",
            SortClause::LocationPriority(_) => "location_priority",
            SortClause::LocationPath(_) => "location_path",
            SortClause::Field(_) => "field",
            SortClause::MapLocationDistance(_) => "maplocation_distance",
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            SortClause::ContentId(_) => "SortClause::ContentId",
            SortClause::ContentName(_) => "SortClause::ContentName",
            SortClause::DatePublished(_) => "SortClause::DatePublished",
            SortClause::DateModified(_) => "SortClause::DateModified",
            SortClause::SectionIdentifier(_) => "SortClause::SectionIdentifier",
            SortClause::SectionName(_) => "SortClause::SectionName",
            SortClause::LocationId(_) => "SortClause::LocationId",
            SortClause::LocationDepth(_) => "SortClause::LocationDepth",
            SortClause::LocationPriority(_) => "SortClause::LocationPriority",
            SortClause::LocationPath(_) => "SortClause::LocationPath",
            SortClause::Field(_) => "SortClause::Field",
            SortClause::MapLocationDistance(_) => "SortClause::MapLocationDistance",
        }
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            SortClause::ContentId(d)
            | SortClause::ContentName(d)
            | SortClause::DatePublished(d)
            | SortClause::DateModified(d)
            | SortClause::SectionIdentifier(d)
            | SortClause::SectionName(d)
            | SortClause::LocationId(d)
            | SortClause::LocationDepth(d)
            | SortClause::LocationPriority(d)
            | SortClause::LocationPath(d) => *d,
            SortClause::Field(field) => field.direction,
            SortClause::MapLocationDistance(distance) => distance.direction,
        }
    }

    pub fn target(&self) -> Option<SortTarget<'_>> {
        match self {
            SortClause::Field(field) => Some(SortTarget::Field(&field.target)),
            SortClause::MapLocationDistance(distance) => {
                Some(SortTarget::MapLocation(&distance.target))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldTarget {
    pub type_identifier: String,
    pub field_identifier: String,
}

/// Sorts on the value of a field of a given content type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSort {
    target: FieldTarget,
    direction: SortDirection,
    custom_fields: CustomFields,
}

impl FieldSort {
    pub fn new(type_identifier: &str, field_identifier: &str) -> Result<Self, ClauseError> {
        ClauseError::require_identifier("Content type identifier", type_identifier)?;
        ClauseError::require_identifier("Field definition identifier", field_identifier)?;

        Ok(Self {
            target: FieldTarget {
                type_identifier: type_identifier.to_string(),
                field_identifier: field_identifier.to_string(),
            },
            direction: SortDirection::default(),
            custom_fields: CustomFields::new(),
        })
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn target(&self) -> &FieldTarget {
        &self.target
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl CustomFieldInterface for FieldSort {
    fn set_custom_field(
        &mut self,
        type_identifier: &str,
        field_identifier: &str,
        custom_field: &str,
    ) {
        self.custom_fields.set(type_identifier, field_identifier, custom_field);
    }

    fn get_custom_field(&self, type_identifier: &str, field_identifier: &str) -> Option<&str> {
        self.custom_fields.get(type_identifier, field_identifier)
    }
}

/// Point the distance is measured from, plus the map location field measured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLocationTarget {
    pub latitude: f64,
    pub longitude: f64,
    pub type_identifier: String,
    pub field_identifier: String,
}

/// Sorts on the distance between a map location field and a fixed point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLocationDistance {
    target: MapLocationTarget,
    direction: SortDirection,
    custom_fields: CustomFields,
}

impl MapLocationDistance {
    pub fn new(
        type_identifier: &str,
        field_identifier: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ClauseError> {
        ClauseError::require_identifier("Content type identifier", type_identifier)?;
        ClauseError::require_identifier("Field definition identifier", field_identifier)?;
        ClauseError::require_coordinate("latitude", latitude, 90.0)?;
        ClauseError::require_coordinate("longitude", longitude, 180.0)?;

        Ok(Self {
            target: MapLocationTarget {
                latitude,
                longitude,
                type_identifier: type_identifier.to_string(),
                field_identifier: field_identifier.to_string(),
            },
            direction: SortDirection::default(),
            custom_fields: CustomFields::new(),
        })
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn target(&self) -> &MapLocationTarget {
        &self.target
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl CustomFieldInterface for MapLocationDistance {
    fn set_custom_field(
        &mut self,
        type_identifier: &str,
        field_identifier: &str,
        custom_field: &str,
    ) {
        self.custom_fields.set(type_identifier, field_identifier, custom_field);
    }

    fn get_custom_field(&self, type_identifier: &str, field_identifier: &str) -> Option<&str> {
        self.custom_fields.get(type_identifier, field_identifier)
    }
}

impl From<FieldSort> for SortClause {
    fn from(value: FieldSort) -> Self {
        SortClause::Field(value)
    }
}

impl From<MapLocationDistance> for SortClause {
    fn from(value: MapLocationDistance) -> Self {
        SortClause::MapLocationDistance(value)
    }
}
