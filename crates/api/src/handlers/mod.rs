pub mod cities;
pub mod currencies;
pub mod faqs;
pub mod reviews;
pub mod site;
pub mod tour_wizard;
pub mod tours;
