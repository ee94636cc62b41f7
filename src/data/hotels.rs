//! Built-in hotel catalog used to seed an empty database.

use chrono::Utc;
use sea_orm::Set;
use uuid::Uuid;

use crate::entities::hotel::{self, Amenities, Amenity};

struct SeedHotel {
    name: &'static str,
    location: &'static str,
    rating: i32,
    reviews: i32,
    price: f64,
    image: &'static str,
    amenities: &'static [Amenity],
    description: &'static str,
}

const CATALOG: &[SeedHotel] = &[
    SeedHotel {
        name: "Polana Serena Hotel",
        location: "Maputo, Moçambique",
        rating: 5,
        reviews: 1023,
        price: 350.0,
        image: "https://dynamic-media-cdn.tripadvisor.com/media/photo-s/02/63/3d/83/pool.jpg?w=600&h=400&s=1",
        amenities: &[
            Amenity::Wifi,
            Amenity::Parking,
            Amenity::Restaurant,
            Amenity::Gym,
            Amenity::Spa,
        ],
        description: "Resort de luxo à beira-mar com comodidades de classe mundial e vistas deslumbrantes para o oceano.",
    },
    SeedHotel {
        name: "Radisson Blu Hotel & Residence",
        location: "Maputo, Moçambique",
        rating: 5,
        reviews: 850,
        price: 320.0,
        image: "https://cf.bstatic.com/xdata/images/hotel/max1024x768/59637868.jpg?k=79396274978763768763786876378687637868",
        amenities: &[
            Amenity::Wifi,
            Amenity::Restaurant,
            Amenity::Gym,
            Amenity::Pool,
        ],
        description: "Hotel moderno com vista para o mar, piscina e restaurante internacional.",
    },
    SeedHotel {
        name: "Southern Sun Maputo",
        location: "Maputo, Moçambique",
        rating: 4,
        reviews: 780,
        price: 280.0,
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQKPt_zh1PA1JY6mBeMHL2AFNO1GbQTvfl8vw&s",
        amenities: &[
            Amenity::Wifi,
            Amenity::Parking,
            Amenity::Restaurant,
            Amenity::Pool,
        ],
        description: "Hotel elegante à beira-mar com piscina, restaurante e fácil acesso à praia.",
    },
    SeedHotel {
        name: "Hotel Cardoso",
        location: "Maputo, Moçambique",
        rating: 4,
        reviews: 600,
        price: 210.0,
        image: "https://cf.bstatic.com/xdata/images/hotel/max1024x768/37868763.jpg?k=37868763786876378687637868",
        amenities: &[
            Amenity::Wifi,
            Amenity::Restaurant,
            Amenity::Pool,
            Amenity::Gym,
        ],
        description: "Hotel tradicional com vista panorâmica para a baía de Maputo e jardins exuberantes.",
    },
    SeedHotel {
        name: "Anantara Bazaruto Island Resort",
        location: "Ilha de Bazaruto, Moçambique",
        rating: 5,
        reviews: 430,
        price: 700.0,
        image: "https://cf.bstatic.com/xdata/images/hotel/max1024x768/23456789.jpg?k=234567892345678923456789",
        amenities: &[
            Amenity::Wifi,
            Amenity::Restaurant,
            Amenity::Spa,
            Amenity::Pool,
        ],
        description: "Resort de luxo em ilha paradisíaca, com villas privativas e experiências exclusivas.",
    },
    SeedHotel {
        name: "Hotel Avenida",
        location: "Maputo, Moçambique",
        rating: 4,
        reviews: 520,
        price: 250.0,
        image: "https://cf.bstatic.com/xdata/images/hotel/max1024x768/34567890.jpg?k=345678903456789034567890",
        amenities: &[
            Amenity::Wifi,
            Amenity::Restaurant,
            Amenity::Gym,
            Amenity::Spa,
        ],
        description: "Hotel sofisticado no centro de Maputo, ideal para negócios e lazer.",
    },
];

/// Fresh active models for every catalog entry. Ids are generated at seed
/// time; the catalog itself is read-only from the API's perspective.
pub fn catalog() -> Vec<hotel::ActiveModel> {
    CATALOG
        .iter()
        .map(|h| hotel::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(h.name.to_string()),
            location: Set(h.location.to_string()),
            rating: Set(h.rating),
            reviews: Set(h.reviews),
            price: Set(h.price),
            image: Set(h.image.to_string()),
            amenities: Set(Amenities(h.amenities.to_vec())),
            description: Set(h.description.to_string()),
            created_at: Set(Utc::now().into()),
        })
        .collect()
}
