pub mod list_item_card;
