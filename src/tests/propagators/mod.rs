mod cardinality;
