pub mod user;
pub mod kitten;

/*
 A user owns any number of kittens. Kittens are only ever visible to their owner,
 and deleting a user takes their kittens with them.
 */
