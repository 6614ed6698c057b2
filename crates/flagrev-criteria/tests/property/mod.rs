mod criteria_properties;
