pub mod win_rate;
