pub mod creep_role;
