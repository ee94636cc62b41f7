//! Static catalogs for the concierge endpoints: rental cars, translators
//! and the city guide. These never touch the database.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i32,
    pub name: &'static str,
    pub category: &'static str,
    pub seats: i32,
    pub price_per_day: f64,
    pub image: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translator {
    pub id: i32,
    pub name: &'static str,
    pub languages: &'static [&'static str],
    pub price_per_day: f64,
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityGuideEntry {
    pub id: i32,
    pub city: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub const CARS: &[Car] = &[
    Car {
        id: 1,
        name: "Toyota Corolla",
        category: "economy",
        seats: 5,
        price_per_day: 45.0,
        image: "https://images.hotllink.com/cars/corolla.jpg",
    },
    Car {
        id: 2,
        name: "Toyota Land Cruiser",
        category: "suv",
        seats: 7,
        price_per_day: 120.0,
        image: "https://images.hotllink.com/cars/landcruiser.jpg",
    },
    Car {
        id: 3,
        name: "Mercedes-Benz Classe E",
        category: "luxury",
        seats: 5,
        price_per_day: 180.0,
        image: "https://images.hotllink.com/cars/classe-e.jpg",
    },
    Car {
        id: 4,
        name: "Hyundai H-1",
        category: "van",
        seats: 9,
        price_per_day: 95.0,
        image: "https://images.hotllink.com/cars/h1.jpg",
    },
];

pub const TRANSLATORS: &[Translator] = &[
    Translator {
        id: 1,
        name: "Amélia Cossa",
        languages: &["português", "english", "changana"],
        price_per_day: 60.0,
        rating: 4.9,
    },
    Translator {
        id: 2,
        name: "João Mucavele",
        languages: &["português", "english", "français"],
        price_per_day: 55.0,
        rating: 4.7,
    },
    Translator {
        id: 3,
        name: "Sara Machava",
        languages: &["português", "english", "español"],
        price_per_day: 50.0,
        rating: 4.6,
    },
];

pub const CITY_GUIDE: &[CityGuideEntry] = &[
    CityGuideEntry {
        id: 1,
        city: "Maputo",
        title: "Mercado Central",
        category: "culture",
        description: "Mercado histórico de 1901 com artesanato, especiarias e fruta tropical.",
    },
    CityGuideEntry {
        id: 2,
        city: "Maputo",
        title: "Fortaleza de Maputo",
        category: "history",
        description: "Fortaleza portuguesa do século XVIII junto à baixa da cidade.",
    },
    CityGuideEntry {
        id: 3,
        city: "Maputo",
        title: "Feira de Artesanato do Parque dos Continuadores",
        category: "shopping",
        description: "Feira de sábado com esculturas em madeira, batik e missangas.",
    },
    CityGuideEntry {
        id: 4,
        city: "Ilha de Bazaruto",
        title: "Mergulho no arquipélago",
        category: "adventure",
        description: "Recifes de coral, dugongos e praias desertas no parque nacional marinho.",
    },
];
