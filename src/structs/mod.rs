pub mod riot_champion_struct;
pub mod riot_image_struct;
pub mod riot_items_struct;
