mod test_corners_basic;
mod test_edges_basic;
mod test_rotation_basic;
