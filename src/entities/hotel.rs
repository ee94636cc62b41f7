use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Closed set of amenity tags. A catalog row carrying a tag outside this set
/// fails deserialization instead of being silently dropped downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Wifi,
    Parking,
    Restaurant,
    Gym,
    Spa,
    Pool,
}

impl Amenity {
    /// Display symbol for each tag. Exhaustive, so a new tag cannot be added
    /// without one.
    pub fn symbol(&self) -> &'static str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Parking => "local_parking",
            Amenity::Restaurant => "restaurant",
            Amenity::Gym => "fitness_center",
            Amenity::Spa => "spa",
            Amenity::Pool => "pool",
        }
    }
}

/// Ordered amenity list, stored as a JSON column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Amenities(pub Vec<Amenity>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotel")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub rating: i32,
    pub reviews: i32,
    pub price: f64,
    pub image: String,
    #[sea_orm(column_type = "Json")]
    pub amenities: Amenities,
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amenity_tags_round_trip() {
        let parsed: Amenities = serde_json::from_str(r#"["wifi","spa"]"#).unwrap();
        assert_eq!(parsed, Amenities(vec![Amenity::Wifi, Amenity::Spa]));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"["wifi","spa"]"#);
    }

    #[test]
    fn test_unknown_amenity_tag_rejected() {
        assert!(serde_json::from_str::<Amenities>(r#"["wifi","heliport"]"#).is_err());
    }
}
