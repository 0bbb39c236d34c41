pub mod city;
pub mod forecast;
pub mod geo;
pub mod region;
