pub mod city_entry;
pub mod forecast_day;
pub mod weather_condition;
