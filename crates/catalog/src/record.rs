use serde::{Deserialize, Serialize};

/// A record field as seen by the query engine.
///
/// Records keep their concrete static types; this union is only the view
/// handed out for matching, so the engine never branches on runtime types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    TextList(&'a [String]),
    /// Unknown field name. Matches nothing, fails nothing.
    Absent,
}

/// Name-based field access for catalog records.
///
/// Each schema maps its known field names to a [`FieldValue`]; any other
/// name yields [`FieldValue::Absent`] so a stale field list degrades to
/// "no match" instead of an error.
pub trait Searchable {
    fn field(&self, name: &str) -> FieldValue<'_>;
}

/// A supplier country with its flagship products and manufacturers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: u32,
    pub name: String,
    pub name_en: String,
    pub region: String,
    pub products: Vec<String>,
    pub manufacturers: Vec<String>,
}

impl Searchable for Country {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Number(f64::from(self.id)),
            "name" => FieldValue::Text(&self.name),
            "name_en" => FieldValue::Text(&self.name_en),
            "region" => FieldValue::Text(&self.region),
            "products" => FieldValue::TextList(&self.products),
            "manufacturers" => FieldValue::TextList(&self.manufacturers),
            _ => FieldValue::Absent,
        }
    }
}

/// An ammunition catalog entry. Ranges are kilometres, weight kilograms,
/// length and accuracy millimetres/metres as published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ammunition {
    pub id: u32,
    pub name: String,
    pub abbreviation: String,
    pub caliber: f64,
    pub kind: String,
    pub weight: f64,
    pub length: f64,
    pub min_range: f64,
    pub max_range: f64,
    pub accuracy: f64,
    pub power: String,
    pub guidance: String,
    pub manufacturer: String,
    pub country: String,
}

impl Searchable for Ammunition {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Number(f64::from(self.id)),
            "name" => FieldValue::Text(&self.name),
            "abbreviation" => FieldValue::Text(&self.abbreviation),
            "caliber" => FieldValue::Number(self.caliber),
            "kind" => FieldValue::Text(&self.kind),
            "weight" => FieldValue::Number(self.weight),
            "length" => FieldValue::Number(self.length),
            "min_range" => FieldValue::Number(self.min_range),
            "max_range" => FieldValue::Number(self.max_range),
            "accuracy" => FieldValue::Number(self.accuracy),
            "power" => FieldValue::Text(&self.power),
            "guidance" => FieldValue::Text(&self.guidance),
            "manufacturer" => FieldValue::Text(&self.manufacturer),
            "country" => FieldValue::Text(&self.country),
            _ => FieldValue::Absent,
        }
    }
}

/// An artillery catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artillery {
    pub id: u32,
    pub name: String,
    pub caliber: f64,
    pub kind: String,
    pub mobility: String,
    pub muzzle_velocity: f64,
    pub range: f64,
    pub barrel_length: f64,
    pub elevation_range: String,
    pub traverse_range: String,
    pub manufacturer: String,
    pub country: String,
}

impl Searchable for Artillery {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Number(f64::from(self.id)),
            "name" => FieldValue::Text(&self.name),
            "caliber" => FieldValue::Number(self.caliber),
            "kind" => FieldValue::Text(&self.kind),
            "mobility" => FieldValue::Text(&self.mobility),
            "muzzle_velocity" => FieldValue::Number(self.muzzle_velocity),
            "range" => FieldValue::Number(self.range),
            "barrel_length" => FieldValue::Number(self.barrel_length),
            "elevation_range" => FieldValue::Text(&self.elevation_range),
            "traverse_range" => FieldValue::Text(&self.traverse_range),
            "manufacturer" => FieldValue::Text(&self.manufacturer),
            "country" => FieldValue::Text(&self.country),
            _ => FieldValue::Absent,
        }
    }
}
