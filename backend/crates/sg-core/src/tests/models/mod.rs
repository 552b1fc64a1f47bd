mod identity;
mod professional_profile;
