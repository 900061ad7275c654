mod identity;
mod provider;
