mod snapshot_properties;
