pub mod shifts;
