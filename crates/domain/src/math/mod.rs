pub mod reward_rate;
