pub mod d400_home_summary;
