#[cfg(test)]
mod region_code;

#[cfg(test)]
mod phonenumberutil_tests;

#[cfg(test)]
mod phonenumbermatcher_tests;
