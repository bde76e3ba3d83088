pub mod league_info;
