pub mod alien_card;
pub mod answer_input;
pub mod button;
pub mod reference_drawer;
