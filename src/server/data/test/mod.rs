mod favorite;
mod planet;
mod spaceship;
mod user;
mod warrior;
