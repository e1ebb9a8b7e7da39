use shared_types::{LatLong, PlaceOfInterest};
use std::sync::LazyLock;

/// Reference point the screen opens on (UT Cancún campus).
pub const UT_CANCUN: LatLong = LatLong::new(21.049706945065065, -86.84696671534338);

static PUEBLOS_MAGICOS: LazyLock<Vec<PlaceOfInterest>> = LazyLock::new(|| {
    vec![
        PlaceOfInterest {
            id: "1".to_string(),
            name: "Valladolid".to_string(),
            description: "Ciudad colonial con cenotes y arquitectura histórica".to_string(),
            image_url:
                "https://upload.wikimedia.org/wikipedia/commons/6/63/Valladolid_iglesia_2.jpg"
                    .to_string(),
            coordinates: LatLong::new(20.6896, -88.2011),
        },
        PlaceOfInterest {
            id: "2".to_string(),
            name: "Tizimín".to_string(),
            description: "Cuna de la vaquería Yucateca y la feria de reyes".to_string(),
            image_url:
                "https://pptotravel.com/wp-content/uploads/2015/01/tizimin-pptotravel-yucatc3a1n-iglesia.jpg?w=1200"
                    .to_string(),
            coordinates: LatLong::new(21.14532149144678, -88.15084455922981),
        },
        PlaceOfInterest {
            id: "3".to_string(),
            name: "Izamal".to_string(),
            description: "Conocida como \"La ciudad amarilla\", rica en historia maya y colonial."
                .to_string(),
            image_url:
                "https://yucatantoday.com/hubfs/Izamal-Convento-San-Bernardino-de-Siena-by-Yucatan-Today.webp"
                    .to_string(),
            coordinates: LatLong::new(20.933, -89.017),
        },
        PlaceOfInterest {
            id: "4".to_string(),
            name: "Maní".to_string(),
            description: "Lugar lleno de cultura y gastronomía tradicional".to_string(),
            image_url:
                "https://upload.wikimedia.org/wikipedia/commons/e/e3/2002.12.30_24_Church_Man%C3%AD_Yucatan_Mexico.jpg"
                    .to_string(),
            coordinates: LatLong::new(20.39294, -89.39219),
        },
        PlaceOfInterest {
            id: "5".to_string(),
            name: "Tekax".to_string(),
            description: "Grutas, aventuras y vistas desde lo alto de Yucatán".to_string(),
            image_url:
                "https://yucatan.travel/wp-content/uploads/2024/05/Tekax-Yucata%CC%81n-PM.jpg"
                    .to_string(),
            coordinates: LatLong::new(20.21227, -89.27622),
        },
        PlaceOfInterest {
            id: "ut".to_string(),
            name: "UT Cancún".to_string(),
            description: "Volver a UT".to_string(),
            image_url:
                "https://lh3.googleusercontent.com/proxy/JKbGe63Uj2PBTWvfOirZqNGhbjbqG6VBshlujpjgsD8lIJVfc2QgN2oQOq3yLOarX3GGUUrSmotChHGKV_qZM3dcozyprjb74YM43yQ8B2aXhqxHU3Hm21J8CpI8vZGRtae8DqcPow"
                    .to_string(),
            coordinates: UT_CANCUN,
        },
    ]
});

/// The fixed catalog of places shown on the screen. Built once, never mutated.
pub fn pueblos_magicos() -> &'static [PlaceOfInterest] {
    &PUEBLOS_MAGICOS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_pairwise_distinct() {
        let places = pueblos_magicos();
        for (i, a) in places.iter().enumerate() {
            for b in &places[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate id in catalog: {}", a.id);
            }
        }
    }

    #[test]
    fn enumeration_is_idempotent() {
        let first: Vec<&str> = pueblos_magicos().iter().map(|p| p.id.as_str()).collect();
        let second: Vec<&str> = pueblos_magicos().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
    }

    #[test]
    fn campus_entry_sits_on_the_reference_point() {
        let ut = pueblos_magicos()
            .iter()
            .find(|p| p.id == "ut")
            .expect("campus entry present");
        assert_eq!(ut.coordinates, UT_CANCUN);
    }
}
