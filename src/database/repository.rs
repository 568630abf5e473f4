pub mod games_repository;
