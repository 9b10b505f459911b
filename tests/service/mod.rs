mod attendance_flow;
