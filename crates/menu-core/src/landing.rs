//! Landing page content: restaurant intro, featured dishes, category tiles,
//! closing call to action.

use serde::Serialize;

use crate::display::format_price;

#[derive(Debug, Clone, Serialize)]
pub struct Restaurant {
    pub name: &'static str,
    pub tagline: &'static str,
    pub city: &'static str,
    pub intro: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedDish {
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub price_label: String,
    pub image: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTile {
    pub name: &'static str,
    /// Category id to preselect on the menu page
    pub category: &'static str,
    pub link: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub restaurant: Restaurant,
    pub featured: Vec<FeaturedDish>,
    pub categories: Vec<CategoryTile>,
    pub call_to_action: CallToAction,
}

const MENU_PATH: &str = "/menu";
const CONTACT_PATH: &str = "/contact";

pub fn restaurant() -> Restaurant {
    Restaurant {
        name: "7 Hills",
        tagline: "Indian Restaurant",
        city: "Leuven",
        intro: "Experience the authentic flavors of India in the heart of Leuven. \
                From aromatic spices to traditional recipes, we bring you a culinary \
                journey that celebrates the rich heritage of Indian cuisine.",
    }
}

pub fn featured_dishes() -> Vec<FeaturedDish> {
    let dish = |name, description, price, image| FeaturedDish {
        name,
        description,
        price,
        price_label: format_price(price),
        image,
        link: MENU_PATH,
    };

    vec![
        dish(
            "Butter Chicken",
            "Tender chicken in rich tomato and cream sauce",
            16.5,
            "/menu/ButterChicken.jpg",
        ),
        dish(
            "Andhra Chicken Biryani",
            "Fragrant basmati rice with tender chicken and aromatic spices",
            19.5,
            "/menu/ChickenBiryani.webp",
        ),
        dish(
            "Masala Dosa",
            "Crispy crepe filled with spiced potato curry",
            12.5,
            "/menu/MasalaDosa.jpg",
        ),
    ]
}

pub fn category_tiles() -> Vec<CategoryTile> {
    let tile = |name, category, image| CategoryTile {
        name,
        category,
        link: MENU_PATH,
        image,
    };

    vec![
        tile("Starters", "starters", "/menu/ChickenPakoda.jpg"),
        tile("Idli & Dosa", "idli-dosa", "/menu/CheesePlainDosa.jpg"),
        tile("Chicken", "chicken", "/menu/ChickenKorma.jpg"),
        tile("Lamb", "lamb", "/menu/LambKorma.jpg"),
        tile("7 Hills Thali", "thali", "/menu/Non-VegThal.jpeg"),
        tile("Tandoori", "tandoori", "/menu/ChickenTandoori.jpg"),
        tile("Naan", "naan", "/menu/GarlicNaan.jpg"),
        tile("Biryani", "biryani", "/menu/ChickenBiryani.jpg"),
    ]
}

pub fn call_to_action() -> CallToAction {
    CallToAction {
        heading: "Ready to Experience Authentic Indian Cuisine?",
        subtitle: "Visit us today and embark on a culinary journey through the diverse \
                   flavors of India",
        links: vec![
            Link {
                label: "Contact Us",
                href: CONTACT_PATH,
            },
            Link {
                label: "View Full Menu",
                href: MENU_PATH,
            },
        ],
    }
}

pub fn landing_page() -> LandingPage {
    LandingPage {
        restaurant: restaurant(),
        featured: featured_dishes(),
        categories: category_tiles(),
        call_to_action: call_to_action(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::sanitize::parse_catalog_document;

    #[test]
    fn test_landing_page_shape() {
        let page = landing_page();
        assert_eq!(page.featured.len(), 3);
        assert_eq!(page.categories.len(), 8);
        assert_eq!(page.featured[0].price_label, "€16.50");
    }

    #[test]
    fn test_call_to_action_links_contact_and_menu() {
        let cta = landing_page().call_to_action;
        assert!(cta.subtitle.ends_with("diverse flavors of India"));

        let hrefs: Vec<&str> = cta.links.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["/contact", "/menu"]);
        assert_eq!(cta.links[1].label, "View Full Menu");
    }

    #[test]
    fn test_tiles_point_at_embedded_categories() {
        let (catalog, _) = parse_catalog_document(include_str!("../data/menu.json")).unwrap();
        for tile in category_tiles() {
            assert_eq!(
                catalog.category_name(tile.category),
                Some(tile.name),
                "tile {}",
                tile.category
            );
        }
    }
}
