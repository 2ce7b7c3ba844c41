mod helpers;
mod messaging_client;
